use crate::modules::catalog::application::outcome::ResultSet;
use crate::modules::catalog::domain::{AnimeSummary, Genre, PageInfo};

use super::dto::{JikanAnimeData, JikanAnimeListResponse};

pub struct JikanMapper;

impl JikanMapper {
    pub fn to_summary(dto: JikanAnimeData) -> AnimeSummary {
        AnimeSummary {
            mal_id: dto.mal_id,
            title: dto.title,
            image_url: dto.images.jpg.image_url.clone(),
            large_image_url: dto
                .images
                .jpg
                .large_image_url
                .clone()
                .or(dto.images.jpg.image_url),
            score: dto.score,
            episodes: dto.episodes,
            status: dto.status,
            synopsis: dto.synopsis,
            genres: dto
                .genres
                .into_iter()
                .map(|g| Genre {
                    mal_id: g.mal_id,
                    name: g.name,
                })
                .collect(),
        }
    }

    /// Map a list response. Pagination is carried over only for endpoints
    /// that actually page; category endpoints always get `None`.
    pub fn to_result_set(response: JikanAnimeListResponse, paginated: bool) -> ResultSet {
        let page_info = if paginated {
            response.pagination.map(|p| PageInfo {
                current_page: p.current_page,
                has_next_page: p.has_next_page,
            })
        } else {
            None
        };

        ResultSet::new(
            response.data.into_iter().map(Self::to_summary).collect(),
            page_info,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::infrastructure::jikan::dto::{JikanImageSet, JikanImages};

    fn dto(mal_id: i32) -> JikanAnimeData {
        JikanAnimeData {
            mal_id,
            title: format!("anime {}", mal_id),
            images: JikanImages {
                jpg: JikanImageSet {
                    image_url: Some("small.jpg".to_string()),
                    small_image_url: None,
                    large_image_url: None,
                },
                webp: None,
            },
            episodes: None,
            status: None,
            score: None,
            synopsis: None,
            genres: vec![],
        }
    }

    #[test]
    fn large_image_falls_back_to_image_url() {
        let summary = JikanMapper::to_summary(dto(1));
        assert_eq!(summary.large_image_url.as_deref(), Some("small.jpg"));
    }

    #[test]
    fn category_responses_drop_pagination() {
        let response = JikanAnimeListResponse {
            data: vec![dto(1)],
            pagination: Some(super::super::dto::JikanPagination {
                current_page: 1,
                has_next_page: true,
            }),
        };
        let set = JikanMapper::to_result_set(response, false);
        assert!(set.page_info.is_none());
    }

    #[test]
    fn search_responses_keep_pagination() {
        let response = JikanAnimeListResponse {
            data: vec![dto(1)],
            pagination: Some(super::super::dto::JikanPagination {
                current_page: 2,
                has_next_page: false,
            }),
        };
        let set = JikanMapper::to_result_set(response, true);
        assert_eq!(
            set.page_info,
            Some(PageInfo {
                current_page: 2,
                has_next_page: false
            })
        );
    }
}
