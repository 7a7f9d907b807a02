use crate::domain::model::{Course, CourseTier};
use crate::utils::error::{QuoteError, Result};
use std::collections::HashSet;

const LONG_FEE: u32 = 1500;
const SHORT_FEE: u32 = 750;
const LONG_DURATION: &str = "6 Months";
const SHORT_DURATION: &str = "6 weeks";

static COURSES: [Course; 7] = [
    Course {
        id: "1",
        name: "First Aid",
        fee: LONG_FEE,
        duration: LONG_DURATION,
        tier: CourseTier::Long,
        purpose: "To provide first aid awareness and basic life support.",
        topics: &[
            "Wounds and bleeding",
            "Burns and fractures",
            "Emergency scene management",
            "Cardio-pulmonary resuscitation (CPR)",
            "Respiratory distress e.g., choking, blocked airway",
        ],
    },
    Course {
        id: "2",
        name: "Sewing",
        fee: LONG_FEE,
        duration: LONG_DURATION,
        tier: CourseTier::Long,
        purpose: "Master the art of sewing and garment repair. Learn to use sewing machines, \
                  hand stitching techniques, pattern reading, and basic tailoring skills.",
        topics: &[
            "Types of stitches",
            "Threading a sewing machine",
            "Sewing buttons, zips, hems, and seams",
            "Alterations",
            "Designing and sewing new garments",
        ],
    },
    Course {
        id: "3",
        name: "Landscaping",
        fee: LONG_FEE,
        duration: LONG_DURATION,
        tier: CourseTier::Long,
        purpose: "To provide landscaping services for new and established gardens.",
        topics: &[
            "Indigenous and exotic plants and trees",
            "Fixed structures (fountains, benches, built-in braai)",
            "Balancing of plants and trees in a garden",
            "Aesthetics of plant shapes and colours",
            "Garden layout",
        ],
    },
    Course {
        id: "4",
        name: "Life Skills",
        fee: LONG_FEE,
        duration: LONG_DURATION,
        tier: CourseTier::Long,
        purpose: "To provide skills to navigate basic life necessities.",
        topics: &[
            "Opening a bank account",
            "Basic Labour law (know your rights)",
            "Basic reading and writing literacy",
            "Basic numeric literacy",
        ],
    },
    Course {
        id: "5",
        name: "Child Minding",
        fee: SHORT_FEE,
        duration: SHORT_DURATION,
        tier: CourseTier::Short,
        purpose: "To provide basic child and baby care.",
        topics: &[
            "Birth to six-month old baby needs",
            "Seven-month to one year old needs",
            "Toddler needs",
            "Educational toys",
        ],
    },
    Course {
        id: "6",
        name: "Cooking",
        fee: SHORT_FEE,
        duration: SHORT_DURATION,
        tier: CourseTier::Short,
        purpose: "To prepare and cook nutritious family meals.",
        topics: &[
            "Nutritional requirements for a healthy body",
            "Types of protein, carbohydrates and vegetables",
            "Planning meals",
            "Tasty and nutritious recipes",
            "Preparation and cooking of meals",
        ],
    },
    Course {
        id: "7",
        name: "Garden Maintenance",
        fee: SHORT_FEE,
        duration: SHORT_DURATION,
        tier: CourseTier::Short,
        purpose: "To provide knowledge of watering, pruning and planting in a domestic garden.",
        topics: &[
            "Watering restrictions and the watering requirements of indigenous and exotic plants",
            "Pruning and propagation of plants",
            "Planting techniques for different plant types",
        ],
    },
];

/// Read-only course table. Built once and shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    /// The fixed seven-course table offered by the provider.
    pub fn standard() -> Self {
        Self {
            courses: COURSES.to_vec(),
        }
    }

    pub fn new(courses: Vec<Course>) -> Result<Self> {
        let mut seen = HashSet::new();
        for course in &courses {
            if !seen.insert(course.id) {
                return Err(QuoteError::ConfigValidationError {
                    field: "catalog".to_string(),
                    message: format!("Duplicate course id '{}'", course.id),
                });
            }
        }
        Ok(Self { courses })
    }

    pub fn find(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == course_id)
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn by_tier(&self, tier: CourseTier) -> impl Iterator<Item = &Course> {
        self.courses.iter().filter(move |c| c.tier == tier)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
