//! Static site metadata shared by every rendered page.

use serde::Serialize;

/// Social profile links shown in the header and footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
}

/// Site owner card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub bio: String,
}

/// One primary navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub title: String,
    pub href: String,
}

impl NavItem {
    fn new(title: &str, href: &str) -> Self {
        Self {
            title: title.to_string(),
            href: href.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub name: String,
    pub description: String,
    pub url: String,
    /// Site-relative path of the social preview image.
    pub og_image: String,
    pub links: SocialLinks,
    pub author: Author,
    pub nav: Vec<NavItem>,
}

impl SiteConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            name: "OneBlacki Portfolio".to_string(),
            description: "Portfolio pessoal mostrando projetos e habilidades".to_string(),
            url: url.into(),
            og_image: "/images/og-image.jpg".to_string(),
            links: SocialLinks {
                github: "https://github.com/oneblacki".to_string(),
                linkedin: "https://linkedin.com/in/oneblacki".to_string(),
                twitter: "https://twitter.com/oneblacki".to_string(),
            },
            author: Author {
                name: "Seu Nome".to_string(),
                email: "email@example.com".to_string(),
                avatar: "/images/avatar.jpg".to_string(),
                bio: "Desenvolvedor Full Stack apaixonado por criar experiências web incríveis"
                    .to_string(),
            },
            nav: vec![
                NavItem::new("Home", "/"),
                NavItem::new("Projetos", "/#projects"),
                NavItem::new("Habilidades", "/#skills"),
                NavItem::new("Experiência", "/#experience"),
                NavItem::new("Contato", "/#contact"),
            ],
        }
    }

    /// Resolves a site-relative path against the public base URL.
    pub fn absolute_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
