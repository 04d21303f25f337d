/// Pixel size of the view the circle is drawn into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ViewGeometry {
    pub width: u32,
    pub height: u32,
}

impl ViewGeometry {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn square(side: u32) -> Self {
        Self::new(side, side)
    }

    /// A view with no area has not been laid out yet.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn min_side(&self) -> u32 {
        self.width.min(self.height)
    }

    /// Integer center, truncated toward the top-left for odd sizes.
    pub fn center(&self) -> (u32, u32) {
        (self.width / 2, self.height / 2)
    }
}

/// How the compositor treats geometry reported across successive renders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GeometryPolicy {
    /// Use whatever geometry each render reports.
    #[default]
    Live,
    /// Keep the first non-empty geometry forever and ignore later resizes.
    Latched,
}

/// Remembers view geometry between renders according to a [`GeometryPolicy`].
#[derive(Clone, Debug, Default)]
pub struct GeometryCache {
    policy: GeometryPolicy,
    cached: Option<ViewGeometry>,
}

impl GeometryCache {
    pub fn new(policy: GeometryPolicy) -> Self {
        Self {
            policy,
            cached: None,
        }
    }

    /// Returns the geometry to draw with, or `None` when the observed view is empty.
    ///
    /// An empty observation never populates the cache, even when latched.
    pub fn resolve(&mut self, observed: ViewGeometry) -> Option<ViewGeometry> {
        if observed.is_empty() {
            return None;
        }
        match self.policy {
            GeometryPolicy::Live => {
                self.cached = Some(observed);
                Some(observed)
            }
            GeometryPolicy::Latched => Some(*self.cached.get_or_insert(observed)),
        }
    }

    pub fn cached(&self) -> Option<ViewGeometry> {
        self.cached
    }

    pub fn policy(&self) -> GeometryPolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero_width(ViewGeometry::new(0, 10), true)]
    #[case::zero_height(ViewGeometry::new(10, 0), true)]
    #[case::laid_out(ViewGeometry::new(10, 10), false)]
    fn test_is_empty(#[case] geometry: ViewGeometry, #[case] expected: bool) {
        assert_eq!(geometry.is_empty(), expected);
    }

    #[test]
    fn test_center_truncates_odd_sizes() {
        assert_eq!(ViewGeometry::new(101, 51).center(), (50, 25));
    }

    #[test]
    fn test_min_side() {
        assert_eq!(ViewGeometry::new(300, 120).min_side(), 120);
    }

    #[test]
    fn test_live_follows_resizes() {
        let mut cache = GeometryCache::new(GeometryPolicy::Live);
        assert_eq!(cache.resolve(ViewGeometry::square(100)), Some(ViewGeometry::square(100)));
        assert_eq!(cache.resolve(ViewGeometry::square(200)), Some(ViewGeometry::square(200)));
        assert_eq!(cache.cached(), Some(ViewGeometry::square(200)));
    }

    #[test]
    fn test_latched_ignores_resizes() {
        let mut cache = GeometryCache::new(GeometryPolicy::Latched);
        cache.resolve(ViewGeometry::square(100));
        assert_eq!(cache.resolve(ViewGeometry::square(200)), Some(ViewGeometry::square(100)));
    }

    #[rstest]
    #[case::live(GeometryPolicy::Live)]
    #[case::latched(GeometryPolicy::Latched)]
    fn test_empty_view_resolves_to_none_and_is_not_cached(#[case] policy: GeometryPolicy) {
        let mut cache = GeometryCache::new(policy);
        assert_eq!(cache.resolve(ViewGeometry::new(0, 80)), None);
        assert_eq!(cache.cached(), None);
        assert_eq!(cache.resolve(ViewGeometry::new(80, 60)), Some(ViewGeometry::new(80, 60)));
    }

    #[test]
    fn test_latched_empty_view_after_latch_is_still_none() {
        let mut cache = GeometryCache::new(GeometryPolicy::Latched);
        cache.resolve(ViewGeometry::square(100));
        assert_eq!(cache.resolve(ViewGeometry::new(0, 0)), None);
    }

    #[test]
    fn test_default_policy_is_live() {
        assert_eq!(GeometryCache::default().policy(), GeometryPolicy::Live);
    }
}
