mod config;
mod help;
mod highlight;
