pub mod asset;
pub mod format;
pub mod product;

pub use asset::{Asset, AssetKind, AssetPage, MediaCategory};
pub use product::{
    BasicData, CertificationDocument, CertificationGroup, DocumentLink, EanCode, MarketingCopy,
    PackagingRow, PackagingSpecs, ProductCard, ProductIcon, ProductViews, RelationshipLink,
    Relationships, SapData, SeoData, VariantRow, WebLink, WebLinks,
};
