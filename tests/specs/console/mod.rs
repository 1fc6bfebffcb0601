mod builtins;
mod chains;
mod stdin;
mod syntax;
