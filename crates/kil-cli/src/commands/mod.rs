pub mod befriend;
pub mod cast;
pub mod demo;
pub mod dispatch;
pub mod exam;
pub mod learn;
pub mod member;
pub mod schema;
pub mod shared;
pub mod spells;
