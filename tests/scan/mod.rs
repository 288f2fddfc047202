mod entropy;
mod scanner;
