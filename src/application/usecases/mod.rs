pub mod generate_drafts;
