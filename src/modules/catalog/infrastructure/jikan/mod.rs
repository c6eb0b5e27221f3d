mod client;
mod dto;
mod mapper;

pub use client::JikanClient;
pub use dto::{
    JikanAnimeData, JikanAnimeListResponse, JikanEntity, JikanImageSet, JikanImages,
    JikanPagination,
};
pub use mapper::JikanMapper;
