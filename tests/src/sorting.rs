mod input;
mod properties;
mod scenarios;
