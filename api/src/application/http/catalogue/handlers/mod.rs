pub mod get_catalogue;
pub mod get_diet_rule;
pub mod get_disease_info;
