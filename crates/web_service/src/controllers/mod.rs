pub mod consistency_controller;
pub mod generate_controller;
pub mod settings_controller;
pub mod system_controller;
