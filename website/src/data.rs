//! Static display data for the landing sections.
//!
//! Product data lives in `nuwe-core`; everything here is page copy only.

pub struct Feature {
    pub title: &'static str,
    pub desc: &'static str,
}

pub fn features() -> Vec<Feature> {
    vec![
        Feature {
            title: "一抹提亮",
            desc: "如雲朵般輕盈的質地，均勻膚色、柔焦毛孔，打造自然透亮的偽素顏妝感。",
        },
        Feature {
            title: "妝養合一",
            desc: "富含保濕成分，上妝同時保養，讓肌膚整天水潤透氣不緊繃。",
        },
        Feature {
            title: "高效防曬",
            desc: "SPF 50+ PA++++，日常通勤到戶外活動，一瓶完成妝前防護。",
        },
        Feature {
            title: "溫和配方",
            desc: "全膚質適用，特別推薦敏感肌。無酒精、無香精，天天使用也安心。",
        },
    ]
}

pub struct Review {
    pub name: &'static str,
    pub quote: &'static str,
    /// Star count, 1 to 5.
    pub rating: u8,
}

pub fn reviews() -> Vec<Review> {
    vec![
        Review {
            name: "林小姐",
            quote: "真的像沒上妝一樣輕透，同事都以為我天生好皮膚。回購第三條了。",
            rating: 5,
        },
        Review {
            name: "Yuki",
            quote: "敏感肌用了完全不泛紅，保濕度也夠，上班補妝超方便。",
            rating: 5,
        },
        Review {
            name: "陳太太",
            quote: "送禮盒給女兒當生日禮物，包裝精緻，她非常喜歡。",
            rating: 4,
        },
    ]
}
