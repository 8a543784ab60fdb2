pub mod uniform_listing;
