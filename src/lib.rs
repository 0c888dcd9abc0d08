pub use tokeninfo_common::*;

#[cfg(test)]
mod tests;
