pub mod books;
pub mod catalog;

pub mod core {
    pub mod command;
    pub mod controller;
    pub mod domain;
    pub mod library;
}

pub mod utils {
    pub mod logging;
}
