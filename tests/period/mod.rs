mod arithmetic;
mod construct;
mod parse;
