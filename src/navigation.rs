//! This file defines the templates and a convenience function for creating the navigation tabs.

use maud::{Markup, html};

use crate::endpoints;

/// Template for a tab in the navigation bar.
///
/// It will change appearance if `is_current` is set to
/// `true`. Only one tab should be set as active at any one time.
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "px-4 py-2 rounded-lg font-medium transition bg-blue-600 text-white"
        } else {
            "px-4 py-2 rounded-lg font-medium transition bg-slate-700 text-slate-300 hover:bg-slate-600"
        };

        html!(
            a
                href=(self.url)
                class=(style)
                aria-current=[self.is_current.then_some("page")]
            {
                (self.title)
            }
        )
    }
}

pub struct NavBar<'a> {
    links: Vec<Link<'a>>,
}

impl NavBar<'_> {
    /// Get the navigation bar.
    ///
    /// If a link matches `active_endpoint`, then that link will be
    /// marked as active and displayed differently in the HTML.
    pub fn new(active_endpoint: &str) -> NavBar<'_> {
        let links = vec![
            Link {
                url: endpoints::DASHBOARD_VIEW,
                title: "Dashboard",
                is_current: active_endpoint == endpoints::DASHBOARD_VIEW,
            },
            Link {
                url: endpoints::CATEGORIZE_VIEW,
                title: "Categorize",
                is_current: active_endpoint == endpoints::CATEGORIZE_VIEW,
            },
        ];

        NavBar { links }
    }

    pub fn into_html(self) -> Markup {
        html!(
            nav class="max-w-7xl mx-auto px-6 mt-8"
            {
                div class="flex gap-4 mb-6"
                {
                    @for link in self.links {
                        (link.into_html())
                    }
                }
            }
        )
    }
}
