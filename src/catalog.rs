//! The fixed list of HD skin sprites fetched from minesweeper.online.

pub const BASE_URL: &str = "https://minesweeper.online/img/skins/hd/";
pub const IMAGE_SUFFIX: &str = ".svg";

/// Which part of the sprite sheet an asset belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetGroup {
    Closed,
    Number,
    YellowNumber,
    Mine,
    Face,
}

/// A logical sprite name and the URL it is downloaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRef {
    pub name: String,
    pub url: String,
    pub group: AssetGroup,
}

impl AssetRef {
    fn new(name: impl Into<String>, group: AssetGroup) -> Self {
        let name = name.into();
        let url = make_url(&name);
        Self { name, url, group }
    }

    /// Last path segment of the URL, used as the on-disk file name.
    pub fn file_name(&self) -> &str {
        self.url.rsplit('/').next().unwrap_or(&self.url)
    }
}

pub fn make_url(name: &str) -> String {
    format!("{BASE_URL}{name}{IMAGE_SUFFIX}")
}

/// Builds the 25-entry catalog in download order.
pub fn build_catalog() -> Vec<AssetRef> {
    use AssetGroup::*;

    let mut assets = Vec::with_capacity(25);

    assets.push(AssetRef::new("closed", Closed));

    for i in 0..9 {
        assets.push(AssetRef::new(format!("type{i}"), Number));
    }
    for i in 0..9 {
        assets.push(AssetRef::new(format!("type{i}_yellow"), YellowNumber));
    }

    for name in ["mine", "mine_red", "mine_wrong"] {
        assets.push(AssetRef::new(name, Mine));
    }
    for name in ["face_lose", "face_pressed", "face_unpressed"] {
        assets.push(AssetRef::new(name, Face));
    }

    assets
}
