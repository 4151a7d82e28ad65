//! Fixed catalog contents.

use homevalue_core::models::enhancement::{
    EnhancementDetail, EnhancementSummary, Impact, Material,
};

struct Seed {
    id: &'static str,
    title: &'static str,
    short: &'static str,
    category: &'static str,
    cost_range: &'static str,
    roi: &'static str,
    duration: &'static str,
    impact: Impact,
    long_description: &'static str,
    materials: &'static [(&'static str, &'static str, &'static str)],
    steps: &'static [&'static str],
}

impl Seed {
    fn build(&self) -> EnhancementDetail {
        EnhancementDetail {
            summary: EnhancementSummary {
                id: self.id.into(),
                title: self.title.into(),
                short: self.short.into(),
                category: self.category.into(),
                cost_range: self.cost_range.into(),
                roi: self.roi.into(),
                duration: self.duration.into(),
                impact: self.impact,
            },
            long_description: self.long_description.into(),
            materials: self
                .materials
                .iter()
                .map(|(name, qty, est_cost)| Material {
                    name: (*name).into(),
                    qty: Some((*qty).into()),
                    est_cost: Some((*est_cost).into()),
                })
                .collect(),
            steps: self.steps.iter().map(|s| (*s).into()).collect(),
        }
    }
}

static SEEDS: &[Seed] = &[
    Seed {
        id: "paint",
        title: "Fresh Interior Paint",
        short: "Transform your home with modern color palettes and premium paint for instant visual upgrade.",
        category: "Interior",
        cost_range: "₹15,000 - ₹30,000",
        roi: "+15% Value",
        duration: "3-5 days",
        impact: Impact::High,
        long_description: "A comprehensive interior repaint using premium washable emulsion. \
            Includes minor surface repair, priming and two finish coats.",
        materials: &[
            ("Premium Emulsion 5L", "6 tins", "₹6,000"),
            ("Primer 5L", "2 tins", "₹1,200"),
            ("Putty & Sandpaper", "set", "₹800"),
            ("Labor & Masking", "lump-sum", "₹6,000"),
        ],
        steps: &[
            "Inspect surfaces & minor repairs",
            "Sanding & priming",
            "Apply two finish coats",
            "Final touch ups & clean",
        ],
    },
    Seed {
        id: "led",
        title: "LED Lighting Upgrade",
        short: "Replace bulbs with energy-efficient LED fixtures and smart switches.",
        category: "Electrical",
        cost_range: "₹8,000 - ₹20,000",
        roi: "+10% Value",
        duration: "1-2 days",
        impact: Impact::High,
        long_description: "Upgrading to LED fixtures and smart dimmers reduces energy use and \
            modernizes interiors. Includes wiring checks and fitting.",
        materials: &[
            ("LED Bulbs (9W)", "10 pcs", "₹1,200"),
            ("LED Downlights", "6 pcs", "₹6,000"),
            ("Smart Switch Module", "2 pcs", "₹1,000"),
        ],
        steps: &[
            "Electrical safety checks",
            "Replace fixtures",
            "Program smart switches",
            "Testing",
        ],
    },
    Seed {
        id: "kitchen",
        title: "Modular Kitchen",
        short: "Install a space-efficient modular kitchen with durable finishes and smart storage.",
        category: "Kitchen",
        cost_range: "₹80,000 - ₹2,00,000",
        roi: "+25% Value",
        duration: "7-10 days",
        impact: Impact::Medium,
        long_description: "Design, manufacture and install a modular kitchen with cabinets, \
            countertops and plumbing adjustments.",
        materials: &[
            ("Cabinet Modules", "set", "₹60,000"),
            ("Quartz Countertop", "6 ft", "₹25,000"),
            ("Hardware (hinges)", "set", "₹5,000"),
        ],
        steps: &[
            "Design signoff",
            "Manufacture",
            "Installation",
            "Plumbing & finishing",
        ],
    },
    Seed {
        id: "bathroom",
        title: "Bathroom Renovation",
        short: "Upgrade fixtures, tiles and add better ventilation for durable and modern bathrooms.",
        category: "Bathroom",
        cost_range: "₹40,000 - ₹1,00,000",
        roi: "+20% Value",
        duration: "5-7 days",
        impact: Impact::Medium,
        long_description: "Replace tiles, fittings and install modern sanitaryware for \
            improved aesthetics and function.",
        materials: &[
            ("Tiles", "per sq.ft", "₹10,000"),
            ("Sanitaryware", "set", "₹15,000"),
            ("Plumbing & labor", "lump-sum", "₹10,000"),
        ],
        steps: &[
            "Demolition",
            "Plumbing works",
            "Tile & fixture installation",
            "Finishing",
        ],
    },
    Seed {
        id: "solar",
        title: "Solar Panel Installation",
        short: "Rooftop solar to reduce electricity bills and add long-term value.",
        category: "Sustainable",
        cost_range: "₹1,00,000 - ₹3,00,000",
        roi: "+30% Value",
        duration: "2-3 days",
        impact: Impact::LongTerm,
        long_description: "Install rooftop solar PV system with inverter and monitoring for \
            energy savings and sustainability.",
        materials: &[
            ("PV Modules", "4-8 panels", "₹1,20,000"),
            ("Inverter & mount", "set", "₹40,000"),
            ("Wiring & protection", "lot", "₹10,000"),
        ],
        steps: &[
            "Survey & load analysis",
            "Mounting panels",
            "Electrical hookup",
            "Commissioning",
        ],
    },
    Seed {
        id: "balcony",
        title: "Balcony Garden Setup",
        short: "Create a green balcony with planters, soil beds and seating for a pleasant space.",
        category: "Exterior",
        cost_range: "₹5,000 - ₹15,000",
        roi: "+12% Value",
        duration: "1-2 days",
        impact: Impact::High,
        long_description: "Design and install planters, soil systems and simple seating to \
            create an aesthetic balcony garden.",
        materials: &[
            ("Planters & soil", "set", "₹4,000"),
            ("Plants (assorted)", "10-15", "₹3,000"),
            ("Seating & accessories", "small", "₹3,000"),
        ],
        steps: &["Design", "Purchase & planting", "Finish & watering setup"],
    },
    Seed {
        id: "flooring",
        title: "Flooring Upgrade",
        short: "Replace worn flooring with durable tiles or vinyl for better aesthetics and durability.",
        category: "Interior",
        cost_range: "₹25,000 - ₹80,000",
        roi: "+18% Value",
        duration: "3-5 days",
        impact: Impact::Medium,
        long_description: "Remove existing floor where necessary and lay new tiles/vinyl with \
            skirting and finishing.",
        materials: &[
            ("Tiles / Vinyl", "per sq.ft", "₹30,000"),
            ("Adhesive & grout", "lot", "₹3,000"),
            ("Labor", "lump-sum", "₹10,000"),
        ],
        steps: &[
            "Prepare subfloor",
            "Lay new flooring",
            "Grouting & finishing",
        ],
    },
    Seed {
        id: "doors_windows",
        title: "Doors & Window Upgrade",
        short: "Replace old doors/windows with insulated, secure, and modern frames to improve comfort.",
        category: "Exterior",
        cost_range: "₹20,000 - ₹80,000",
        roi: "+14% Value",
        duration: "2-4 days",
        impact: Impact::Medium,
        long_description: "Install new frames, glazing or shutters for better insulation, \
            security and visual appeal.",
        materials: &[
            ("Window frames & glass", "set", "₹30,000"),
            ("Door panels & locks", "set", "₹25,000"),
        ],
        steps: &[
            "Measure & order",
            "Remove old frames",
            "Install new & seal",
        ],
    },
];

/// All enhancements in display order.
pub(crate) fn enhancements() -> Vec<EnhancementDetail> {
    SEEDS.iter().map(Seed::build).collect()
}
