pub mod retail_chain;
