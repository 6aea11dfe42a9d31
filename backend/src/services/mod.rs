pub mod generator;
pub mod templates;
pub mod upstream;

#[cfg(test)]
mod tests;
