pub mod db;
pub mod books;
pub mod users;

#[cfg(test)]
mod tests;
