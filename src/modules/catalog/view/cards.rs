use crate::modules::catalog::domain::AnimeSummary;

/// The result grid holds a fixed number of cards; anything past this is
/// dropped no matter how many items the response carried.
pub const GRID_CAPACITY: usize = 12;

/// One display card in the result grid. `index` is what a select action
/// reports back to resolve the full item.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultCard {
    pub index: usize,
    pub mal_id: i32,
    pub title: String,
    pub image_url: Option<String>,
}

/// Turn result items into display cards, preserving order and truncating to
/// the grid capacity. Pure and deterministic.
pub fn build_cards(items: &[AnimeSummary]) -> Vec<ResultCard> {
    items
        .iter()
        .take(GRID_CAPACITY)
        .enumerate()
        .map(|(index, item)| ResultCard {
            index,
            mal_id: item.mal_id,
            title: item.title.clone(),
            image_url: item.image_url.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(mal_id: i32, title: &str) -> AnimeSummary {
        AnimeSummary {
            mal_id,
            title: title.to_string(),
            image_url: Some(format!("https://cdn.example/{}.jpg", mal_id)),
            large_image_url: None,
            score: None,
            episodes: None,
            status: None,
            synopsis: None,
            genres: vec![],
        }
    }

    #[test]
    fn truncates_to_grid_capacity() {
        let items: Vec<_> = (0..24).map(|i| item(i, &format!("title {}", i))).collect();
        let cards = build_cards(&items);
        assert_eq!(cards.len(), GRID_CAPACITY);
        assert_eq!(cards[0].title, "title 0");
        assert_eq!(cards[11].title, "title 11");
    }

    #[test]
    fn preserves_order_and_is_deterministic() {
        let items = vec![item(3, "c"), item(1, "a"), item(2, "b")];
        let first = build_cards(&items);
        let second = build_cards(&items);
        assert_eq!(first, second);
        assert_eq!(
            first.iter().map(|c| c.mal_id).collect::<Vec<_>>(),
            vec![3, 1, 2]
        );
    }

    #[test]
    fn short_lists_are_kept_whole() {
        let items = vec![item(1, "only")];
        assert_eq!(build_cards(&items).len(), 1);
        assert!(build_cards(&[]).is_empty());
    }
}
