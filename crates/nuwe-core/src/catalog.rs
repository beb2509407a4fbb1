//! Static product catalog for the NUWE landing page
//!
//! The catalog is compiled in: there is no fetch path, no mutation, and no
//! query/filter/sort operation. The slice order is the display order.

use serde::Serialize;

/// One sellable product as presented on the landing page.
///
/// `price` is a pre-formatted display string (e.g. `NT$ 880`); no arithmetic
/// is ever performed on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Unique across the catalog.
    pub id: u32,
    pub name: &'static str,
    pub price: &'static str,
    /// Static asset path. A missing file degrades to a broken image, never a fault.
    pub image: &'static str,
    /// Optional promotional label rendered as a badge over the card image.
    pub tag: Option<&'static str>,
    pub description: &'static str,
    /// Specification lines shown in the detail overlay. Non-empty for every product.
    pub details: &'static [&'static str],
}

/// The full catalog in display order.
pub const CATALOG: &[Product] = &[
    Product {
        id: 1,
        name: "NUWE 輕透素顏霜 (經典款)",
        price: "NT$ 880",
        image: "/product-feature.png",
        tag: Some("熱銷 TOP 1"),
        description: "30ml 經典容量。一抹提亮，打造如雲朵般輕盈的偽素顏妝感。\
            富含保濕成分，妝養合一，讓肌膚整天水潤透氣。",
        details: &[
            "容量：30ml",
            "防曬係數：SPF 50+ PA++++",
            "適用膚質：全膚質適用，特別推薦敏感肌",
            "使用方法：保養後，取適量均勻塗抹於全臉",
        ],
    },
    Product {
        id: 2,
        name: "NUWE 輕透素顏霜 (旅行版)",
        price: "NT$ 350",
        image: "/product-tube.png",
        tag: Some("便攜首選"),
        description: "10ml 輕巧包裝。小巧好攜帶，隨時隨地補妝，保持完美氣色。\
            適合旅行、出差或隨身攜帶。",
        details: &[
            "容量：10ml",
            "防曬係數：SPF 50+ PA++++",
            "特色：真空按壓瓶設計，不僅衛生更能用盡最後一滴",
        ],
    },
    Product {
        id: 3,
        name: "NUWE 雲朵光感禮盒",
        price: "NT$ 1,680",
        image: "/product-gift-set.png",
        tag: Some("送禮推薦"),
        description: "包含經典素顏霜 30ml + 旅行版 10ml，再贈送品牌訂製雲朵化妝包。\
            給自己或閨蜜最貼心的呵護。",
        details: &[
            "內容物：素顏霜 30ml x1 + 素顏霜 10ml x1 + 雲朵化妝包 x1",
            "包裝：品牌專屬禮盒包裝 (附提袋)",
            "限量發售",
        ],
    },
];

/// Read-only view of the catalog. Always rendered in full, in this order.
pub fn catalog() -> &'static [Product] {
    CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_three_products_in_order() {
        let products = catalog();
        assert_eq!(products.len(), 3);
        let ids: Vec<u32> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_catalog_ids_unique() {
        let ids: HashSet<u32> = catalog().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), catalog().len());
    }

    #[test]
    fn test_catalog_details_non_empty() {
        for product in catalog() {
            assert!(
                !product.details.is_empty(),
                "product {} has no detail lines",
                product.id
            );
        }
    }

    #[test]
    fn test_catalog_tags() {
        let tags: Vec<Option<&str>> = catalog().iter().map(|p| p.tag).collect();
        assert_eq!(
            tags,
            vec![Some("熱銷 TOP 1"), Some("便攜首選"), Some("送禮推薦")]
        );
    }

    #[test]
    fn test_catalog_display_fields_populated() {
        for product in catalog() {
            assert!(!product.name.is_empty());
            assert!(!product.price.is_empty());
            assert!(!product.description.is_empty());
            assert!(product.image.starts_with('/'));
        }
    }
}
