pub mod edm;
