//! Static portfolio content: projects, categories, services and agency profile

/// Project category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Branding,
    Packaging,
    LogoDesign,
    PublicationDesign,
    Advertising,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Branding => "Branding",
            Self::Packaging => "Packaging",
            Self::LogoDesign => "Logo Design",
            Self::PublicationDesign => "Publication Design",
            Self::Advertising => "Advertising",
        }
    }
}

/// Filter applied to the works gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filter bar order
    pub const ALL: [CategoryFilter; 6] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Branding),
        CategoryFilter::Only(Category::Packaging),
        CategoryFilter::Only(Category::LogoDesign),
        CategoryFilter::Only(Category::PublicationDesign),
        CategoryFilter::Only(Category::Advertising),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => project.category == *category,
        }
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let pos = self.position();
        if pos == 0 {
            Self::ALL[Self::ALL.len() - 1]
        } else {
            Self::ALL[pos - 1]
        }
    }
}

/// A portfolio project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: Category,
    pub image: &'static str,
    pub featured: bool,
    pub description: &'static str,
    pub gallery: &'static [&'static str],
}

/// A service offered by the studio
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

/// External profile link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const STUDIO_NAME: &str = "Terry Designs";
pub const STUDIO_TAGLINE: &str = "Digital Agency";
pub const HERO_HEADLINE: &str = "Bringing Creativity to Life, One Design at a Time";
pub const HERO_INTRO: &str = "Hi, I'm Terry Masese. I craft innovative and visually stunning \
designs that connect brands with their audiences. Let's create something extraordinary together.";
pub const ABOUT_TEXT: &str = "I am a passionate and dedicated designer with a keen eye for detail \
and a love for storytelling. My journey into design began with a simple curiosity and has grown \
into a full-fledged career focused on creating meaningful and impactful visual experiences. I \
believe that great design is not just about aesthetics, but about solving problems and \
communicating ideas effectively.";
pub const CTA_HEADLINE: &str = "Have a project in mind?";
pub const CTA_TEXT: &str = "Let's turn your idea into a digital reality. I'm here to help you \
create something truly special.";
pub const FOOTER_TEXT: &str = "Crafting innovative and visually stunning designs that connect \
brands with their audiences.";
pub const COLLABORATE_URL: &str = "https://wa.me/254700902124";

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Belmont",
        category: Category::Packaging,
        image: "/images/hp/packaging.png",
        featured: true,
        description: "Shwepi, a new player in the organic snack market, needed packaging that \
would pop on crowded shelves. We designed a vibrant and playful packaging system that highlights \
the natural ingredients and appeals to health-conscious consumers. The design is not only \
eye-catching but also practical, ensuring product freshness and a positive user experience.",
        gallery: &[
            "https://images.unsplash.com/photo-1594905385633-49d936551a6c?q=80&w=1964&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1622483727542-fad66a273e34?q=80&w=1974&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1587593202394-1a9a839d3df3?q=80&w=1935&auto=format&fit=crop",
        ],
    },
    Project {
        id: 2,
        title: "Maridadi Restaurant",
        category: Category::Branding,
        image: "/images/maridadi/maridadi.png",
        featured: true,
        description: "Crafting a compelling brand identity goes beyond just a logo. It's about \
creating a cohesive visual story that resonates with your audience. From logos to color schemes, \
typography, and branding guidelines, every element is designed to reflect your values and make a \
lasting impact. Whether you're building a new brand or refreshing an existing one, I'm here to \
help you stand out.",
        gallery: &["/images/hp/logo-design.png", "/images/maridadi/maridadi.png"],
    },
    Project {
        id: 3,
        title: "World a Small Village",
        category: Category::PublicationDesign,
        image: "/images/hp/book-cover.png",
        featured: true,
        description: "Publication design combines the art of storytelling with impactful visuals \
to create engaging books, magazines, brochures, and digital content. Through thoughtful \
typography, layout, and imagery, each page is crafted to captivate readers and communicate your \
message effectively. Whether in print or digital format, I design publications that are visually \
appealing and highly functional, ensuring your content shines.",
        gallery: &["/images/hp/book-cover.png"],
    },
    Project {
        id: 4,
        title: "Young Trumpeters",
        category: Category::LogoDesign,
        image: "/images/hp/logo-designing.png",
        featured: true,
        description: "A logo is the cornerstone of your brand identity, a visual symbol that \
represents your values, vision, and personality. I specialize in designing logos that are \
timeless, versatile, and memorable, ensuring they resonate with your audience and leave a lasting \
impression. Whether you're starting fresh or rebranding, I'll craft a logo that speaks for your \
brand.",
        gallery: &["/images/hp/logo-designing.png"],
    },
    Project {
        id: 5,
        title: "Shwepi",
        category: Category::Packaging,
        image: "/images/hp/packaging.png",
        featured: false,
        description: "Packaging is more than just a container. It's your brand's first \
impression. A well-designed package not only protects your product but also tells a story, grabs \
attention, and connects with your customers. Whether it's minimalist, eco-friendly, or bold and \
colorful, I create packaging that enhances your product and leaves a lasting impact on the \
shelves.",
        gallery: &["/images/hp/packaging.png"],
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        title: "Branding",
        description: "Crafting memorable brand identities that tell your story and resonate with your audience.",
    },
    Service {
        title: "Advertising",
        description: "Designing impactful ad campaigns that capture attention and drive results across all media.",
    },
    Service {
        title: "Packaging",
        description: "Designing stunning product packaging that stands out on the shelf and captivates customers.",
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "Facebook",
        url: "https://www.facebook.com/",
    },
    SocialLink {
        label: "Instagram",
        url: "https://www.instagram.com/terrydesigns21",
    },
    SocialLink {
        label: "WhatsApp",
        url: COLLABORATE_URL,
    },
];

/// Look up a project by id
pub fn find_project(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

/// Projects shown in the "Selected Works" section
pub fn featured_projects() -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| p.featured).collect()
}

/// Projects matching a gallery filter, in catalog order
pub fn filter_projects(filter: CategoryFilter) -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| filter.matches(p)).collect()
}

/// Up to two other featured projects to suggest from a project page
pub fn related_projects(current_id: u32) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|p| p.featured && p.id != current_id)
        .take(2)
        .collect()
}
