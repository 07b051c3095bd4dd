pub mod airkorea;
pub mod context;
pub mod geo;
pub mod kakao;
pub mod pipeline;
pub mod transport;
