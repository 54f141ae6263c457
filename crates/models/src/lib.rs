pub mod errors;
pub mod db;
pub mod entity;
pub mod book;

#[cfg(test)]
mod tests;
