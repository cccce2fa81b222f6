use feedjoin_shared_kernel::Resource;

/// How a child collection hangs off a parent collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relation {
    pub parents: Resource,
    pub children: Resource,
    /// Field on each child holding the parent's `id`.
    pub foreign_key: &'static str,
    /// Field added to each parent to hold its children.
    pub attach_as: &'static str,
}

impl Relation {
    pub const ALBUMS_WITH_PHOTOS: Self = Self {
        parents: Resource::Albums,
        children: Resource::Photos,
        foreign_key: "albumId",
        attach_as: "photos",
    };

    pub const USERS_WITH_POSTS: Self = Self {
        parents: Resource::Users,
        children: Resource::Posts,
        foreign_key: "userId",
        attach_as: "posts",
    };
}
