//! HTTP API for the first-words service.
//!
//! Parents register an account, attach children to it, and record the
//! words and developmental milestones each child achieves. Every route
//! except registration requires Basic authentication. Child-scoped routes
//! take a `parentID` query parameter that administrators must supply to
//! act on a parent's behalf; for regular parents it is ignored.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | POST | `/api/parents` | Register a parent account (no auth) |
//! | GET | `/api/parents` | List parent accounts |
//! | GET | `/api/parents/{parent_id}` | Fetch one parent |
//! | DELETE | `/api/parents/{parent_id}` | Delete an account (owner or admin) |
//! | PUT | `/api/parents/{parent_id}/password` | Change a password (owner or admin) |
//! | POST | `/api/children` | Add a child |
//! | GET | `/api/children` | List the caller's children |
//! | GET | `/api/children/{child_id}` | Fetch one child |
//! | DELETE | `/api/children/{child_id}` | Delete a child and its records |
//! | POST | `/api/words/{child_id}` | Record a word |
//! | GET | `/api/words/{child_id}` | List recorded words |
//! | GET | `/api/words/{child_id}/word?word=` | Find a word by text |
//! | DELETE | `/api/words/{child_id}/{word_id}` | Delete a word record |
//! | GET | `/api/words/{child_id}/before/{date}` | Words achieved before a date |
//! | GET | `/api/words/{child_id}/after/{date}` | Words achieved after a date |
//! | GET | `/api/words/{child_id}/between?startDate=&endDate=` | Words within a range |
//! | POST | `/api/milestones/{child_id}` | Record a milestone |
//! | GET | `/api/milestones/{child_id}` | List milestones |
//! | GET | `/api/milestones/{child_id}/title?title=` | Search milestones by title |
//! | GET | `/api/milestones/{child_id}/milestone?title=` | Find one milestone by title |
//! | PUT | `/api/milestones/{child_id}/{milestone_id}` | Update a milestone |
//! | DELETE | `/api/milestones/{child_id}/{milestone_id}` | Delete a milestone |
//! | GET | `/api/milestones/{child_id}/before/{date}` | Milestones before a date |
//! | GET | `/api/milestones/{child_id}/after/{date}` | Milestones after a date |
//! | GET | `/api/milestones/{child_id}/between?startDate=&endDate=` | Milestones within a range |

#![forbid(unsafe_code)]

pub mod auth;
pub mod dto;
pub mod error;
pub mod router;
pub mod state;

pub use auth::{basic_auth_middleware, AuthState, Caller};
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use router::api_router;
pub use state::ApiState;
