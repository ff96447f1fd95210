pub mod state;
pub mod html;
pub mod theme;
pub mod panels;

#[cfg(test)]
mod tests;
