pub mod generate_care_plan;
