//! Output formatting utilities

use crate::domain::{Category, ItemMap};

/// Format one category's items, one `id  text` row per item
pub fn format_item_list(category: Category, items: &ItemMap) -> String {
    if items.is_empty() {
        return format!("No items in {}", category);
    }

    let mut output = String::new();
    for (id, text) in items.iter() {
        output.push_str(&format!("{}  {}\n", id, text));
    }
    output
}

/// Format the category toggle, marking the selected one
pub fn format_category_header(selected: Category) -> String {
    Category::ALL
        .iter()
        .map(|category| {
            if *category == selected {
                format!("[{}]", category)
            } else {
                format!(" {} ", category)
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemId;

    #[test]
    fn test_format_empty_list() {
        let output = format_item_list(Category::Travel, &ItemMap::new());
        assert_eq!(output, "No items in Travel");
    }

    #[test]
    fn test_format_item_list() {
        let items = ItemMap::new()
            .with_item(ItemId::from("1700000000000"), "buy milk")
            .with_item(ItemId::from("1700000000001"), "pay rent");

        let output = format_item_list(Category::Work, &items);
        assert_eq!(
            output,
            "1700000000000  buy milk\n1700000000001  pay rent\n"
        );
    }

    #[test]
    fn test_format_category_header() {
        assert_eq!(format_category_header(Category::Work), "[Work]   Travel ");
        assert_eq!(format_category_header(Category::Travel), " Work   [Travel]");
    }
}
