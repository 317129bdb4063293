//! Static product catalog and category filtering.
//!
//! DESIGN
//! ======
//! The catalog is compiled in. Products are never fetched, persisted, or
//! mutated, so they are `&'static` records and filtering borrows from the
//! constant table.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// Product category shown in the catalog bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Snacks,
    Drinks,
    Stationery,
    Meals,
    Hygiene,
    Accessories,
}

impl Category {
    pub const ALL: [Self; 6] = [
        Self::Snacks,
        Self::Drinks,
        Self::Stationery,
        Self::Meals,
        Self::Hygiene,
        Self::Accessories,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Snacks => "snacks",
            Self::Drinks => "drinks",
            Self::Stationery => "stationery",
            Self::Meals => "meals",
            Self::Hygiene => "hygiene",
            Self::Accessories => "accessories",
        }
    }

    /// Capitalized display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Snacks => "Snacks",
            Self::Drinks => "Drinks",
            Self::Stationery => "Stationery",
            Self::Meals => "Meals",
            Self::Hygiene => "Hygiene",
            Self::Accessories => "Accessories",
        }
    }
}

/// Catalog filter: every product, or one category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    #[must_use]
    pub fn matches(self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => product.category == category,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    /// `"all"` or the category slug.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.slug(),
        }
    }

    /// The "all" filter followed by each category, in catalog-bar order.
    #[must_use]
    pub fn choices() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(Category::ALL.into_iter().map(Self::Only))
            .collect()
    }
}

/// A catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub category: Category,
    /// Display price, possibly a range (e.g. `"₱20-₱35"`).
    pub price: &'static str,
    pub description: &'static str,
    /// Font Awesome icon classes including the animation modifier.
    pub icon: &'static str,
    /// `#RRGGBB` accent color.
    pub color: &'static str,
    /// Short badge text.
    pub tag: &'static str,
}

impl Product {
    /// Gradient behind the product icon, using the accent color at two alphas.
    #[must_use]
    pub fn image_background(&self) -> String {
        let color = self.color;
        format!("background: linear-gradient(135deg, {color}20, {color}40);")
    }

    #[must_use]
    pub fn icon_style(&self) -> String {
        format!("color: {}; font-size: 3.5rem;", self.color)
    }
}

/// Every product in the store, in display order.
pub static PRODUCTS: [Product; 18] = [
    Product {
        id: 1,
        name: "Assorted Biscuits Pack",
        category: Category::Snacks,
        price: "₱25",
        description: "Mix of cream-filled, wafer, and cracker biscuits. Perfect for quick snacks between classes.",
        icon: "fas fa-cookie-bite fa-bounce",
        color: "#F59E0B",
        tag: "Bestseller",
    },
    Product {
        id: 2,
        name: "Crispy Potato Chips",
        category: Category::Snacks,
        price: "₱35",
        description: "Crunchy potato chips in BBQ, Cheese, and Sour Cream flavors.",
        icon: "fas fa-pizza-slice fa-shake",
        color: "#DC2626",
        tag: "Popular",
    },
    Product {
        id: 3,
        name: "Energy Drinks",
        category: Category::Drinks,
        price: "₱50",
        description: "Boost your energy for late-night studying. Red Bull, Monster, and local brands available.",
        icon: "fas fa-battery-full fa-beat",
        color: "#DC2626",
        tag: "Energy Boost",
    },
    Product {
        id: 4,
        name: "Cold Refreshments",
        category: Category::Drinks,
        price: "₱20-₱35",
        description: "Soft drinks, juices, iced tea, and bottled water. Stay refreshed!",
        icon: "fas fa-glass-whiskey fa-beat",
        color: "#3B82F6",
        tag: "Chilled",
    },
    Product {
        id: 5,
        name: "Premium Ballpens Set",
        category: Category::Stationery,
        price: "₱25",
        description: "Set of 3 smooth-writing ballpens in different colors for notes.",
        icon: "fas fa-pen fa-fade",
        color: "#10B981",
        tag: "Study Essential",
    },
    Product {
        id: 6,
        name: "Pencils & Erasers",
        category: Category::Stationery,
        price: "₱15",
        description: "Wooden pencils with quality erasers. Essential for exams.",
        icon: "fas fa-pencil-alt fa-beat-fade",
        color: "#8B5CF6",
        tag: "Must-have",
    },
    Product {
        id: 7,
        name: "Study Notebooks",
        category: Category::Stationery,
        price: "₱40-₱60",
        description: "Different sizes and types for all your academic needs.",
        icon: "fas fa-book fa-flip",
        color: "#EC4899",
        tag: "Academic",
    },
    Product {
        id: 8,
        name: "Instant Noodles",
        category: Category::Meals,
        price: "₱18",
        description: "Quick and delicious meals for busy study sessions.",
        icon: "fas fa-bowl-food fa-spin-pulse",
        color: "#F97316",
        tag: "Quick Meal",
    },
    Product {
        id: 9,
        name: "Bottled Water",
        category: Category::Drinks,
        price: "₱15",
        description: "Pure drinking water to keep you hydrated throughout the day.",
        icon: "fas fa-bottle-water fa-beat",
        color: "#06B6D4",
        tag: "Hydration",
    },
    Product {
        id: 10,
        name: "Coffee & Hot Drinks",
        category: Category::Drinks,
        price: "₱30-₱55",
        description: "3-in-1 coffee sachets, hot chocolate, and instant cappuccino for those long study nights.",
        icon: "fas fa-mug-saucer fa-bounce",
        color: "#92400E",
        tag: "Wake-Up Call",
    },
    Product {
        id: 11,
        name: "Highlighters Pack",
        category: Category::Stationery,
        price: "₱30",
        description: "Bright highlighters in different colors for effective studying.",
        icon: "fas fa-highlighter fa-fade",
        color: "#FBBF24",
        tag: "Study Aid",
    },
    Product {
        id: 12,
        name: "Cup Noodles",
        category: Category::Meals,
        price: "₱25",
        description: "Ready-to-eat cup noodles, just add hot water!",
        icon: "fas fa-mug-hot fa-beat-fade",
        color: "#DC2626",
        tag: "Instant",
    },
    Product {
        id: 13,
        name: "Sandwich & Burgers",
        category: Category::Meals,
        price: "₱45-₱75",
        description: "Freshly made sandwiches and burgers. Perfect lunch for busy students.",
        icon: "fas fa-burger fa-shake",
        color: "#F59E0B",
        tag: "Fresh Meals",
    },
    Product {
        id: 14,
        name: "Hand Sanitizer & Wipes",
        category: Category::Hygiene,
        price: "₱35-₱50",
        description: "Keep your hands clean and germ-free. Alcohol-based sanitizers and antibacterial wipes.",
        icon: "fas fa-pump-soap fa-beat",
        color: "#10B981",
        tag: "Stay Safe",
    },
    Product {
        id: 15,
        name: "Tissue Packs",
        category: Category::Hygiene,
        price: "₱15",
        description: "Pocket tissue packs and facial tissues. Essential for everyday use.",
        icon: "fas fa-box-tissue fa-fade",
        color: "#8B5CF6",
        tag: "Daily Essential",
    },
    Product {
        id: 16,
        name: "Phone Charger Cables",
        category: Category::Accessories,
        price: "₱80-₱150",
        description: "USB-C, Lightning, and Micro-USB charging cables. Keep your devices powered up!",
        icon: "fas fa-charging-station fa-beat-fade",
        color: "#3B82F6",
        tag: "Tech Essential",
    },
    Product {
        id: 17,
        name: "Earphones & Headphones",
        category: Category::Accessories,
        price: "₱150-₱350",
        description: "Quality earphones and headphones for music and online classes.",
        icon: "fas fa-headphones fa-spin",
        color: "#EC4899",
        tag: "Audio Gear",
    },
    Product {
        id: 18,
        name: "Power Bank",
        category: Category::Accessories,
        price: "₱400-₱800",
        description: "Portable power banks 10,000mAh - 20,000mAh. Never run out of battery!",
        icon: "fas fa-battery-three-quarters fa-bounce",
        color: "#10B981",
        tag: "Power Up",
    },
];

/// Products matching `filter`, in catalog order.
#[must_use]
pub fn filter_products(filter: CategoryFilter) -> Vec<&'static Product> {
    PRODUCTS.iter().filter(|p| filter.matches(p)).collect()
}
