pub mod hex_dump;
