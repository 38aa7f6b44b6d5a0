//! Shared components for the app: the Pico.css wrappers, the contract address
//! display, and the verified-source viewer.
pub mod address_display;
pub mod pico;
pub mod source_viewer;
