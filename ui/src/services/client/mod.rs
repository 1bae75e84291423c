// Client side of the remote donor service
//
// - types: wire representation of donors, statuses and RPC replies
// - backend: the RPC surface as an async trait
// - http_backend: JSON-RPC over HTTP
// - memory_backend: in-process stand-in with the same rules
// - session: operator identity kept in sessionStorage

pub mod backend;
pub mod errors;
pub mod http_backend;
pub mod memory_backend;
pub mod session;
pub mod types;

pub use backend::DonorBackend;
pub use errors::{ClientError, ClientResult};
pub use http_backend::HttpDonorBackend;
pub use memory_backend::InMemoryDonorBackend;
pub use session::{OperatorIdentity, SessionManager};
pub use types::{BloodGroup, Donor, DonorDetails, DonorId, DonorStatus, Timestamp};
