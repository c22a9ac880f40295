pub mod hosted_content_repository;
pub mod profile_repository;
