//! Sidebar content: identity and social links.

/// Who the page is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub bio: &'static str,
    /// Avatar image asset.
    pub avatar: &'static str,
    /// Shown in place of the avatar image.
    pub initials: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Renn Baelish",
    bio: "Anime in my veins, code in my soul, pixels in my blood. \
          Hacking, creating, and leveling up the game!",
    avatar: "/pp4.gif",
    initials: "UN",
};

/// An outbound social link in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
    pub glyph: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 6] = [
    SocialLink {
        label: "YouTube",
        url: "https://youtube.com",
        glyph: "▶",
    },
    SocialLink {
        label: "Instagram",
        url: "https://instagram.com",
        glyph: "◎",
    },
    SocialLink {
        label: "TikTok",
        url: "https://tiktok.com",
        glyph: "♪",
    },
    SocialLink {
        label: "GitHub",
        url: "https://github.com",
        glyph: "⌥",
    },
    SocialLink {
        label: "Spotify",
        url: "https://spotify.com",
        glyph: "♫",
    },
    SocialLink {
        label: "SoundCloud",
        url: "https://soundcloud.com",
        glyph: "☁",
    },
];
