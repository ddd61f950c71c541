//! Request guards applied by controllers before calling services.

pub mod auth;

#[cfg(test)]
mod test;
