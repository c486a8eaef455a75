//! Session Orchestration — drives a user through question-by-question
//! submission: create session → evaluate each answer → persist → derive
//! completion and the session mean after the final answer.

pub mod handlers;
pub mod scoring;
pub mod store;
