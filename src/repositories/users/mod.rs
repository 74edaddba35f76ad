pub mod memory_user_repo;
pub mod mongo_user_repo;
pub mod user_repo;

pub use memory_user_repo::InMemoryUserRepository;
pub use mongo_user_repo::MongoUserRepository;
pub use user_repo::UserRepository;

#[cfg(test)]
pub use user_repo::MockUserRepository;
