//! Static marketing content
//!
//! Service areas carry their icon explicitly instead of being looked up by
//! display title.

use serde::Serialize;

/// Icons available to the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Users,
    Megaphone,
    GraduationCap,
    ClipboardList,
}

/// Consulting and training areas shown on the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceArea {
    PeopleLeadership,
    DigitalMarketing,
    EducationalManagement,
    ProjectPlanning,
}

impl ServiceArea {
    pub const ALL: [ServiceArea; 4] = [
        ServiceArea::PeopleLeadership,
        ServiceArea::DigitalMarketing,
        ServiceArea::EducationalManagement,
        ServiceArea::ProjectPlanning,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ServiceArea::PeopleLeadership => "People Management and Leadership",
            ServiceArea::DigitalMarketing => "Digital Marketing and Sales Strategy",
            ServiceArea::EducationalManagement => "Educational Management",
            ServiceArea::ProjectPlanning => "Project Planning and Coordination",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            ServiceArea::PeopleLeadership => Icon::Users,
            ServiceArea::DigitalMarketing => Icon::Megaphone,
            ServiceArea::EducationalManagement => Icon::GraduationCap,
            ServiceArea::ProjectPlanning => Icon::ClipboardList,
        }
    }
}
