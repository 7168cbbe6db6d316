//! `authscan examples` – list example login pages.

use authscan_core::presentation::EXAMPLE_SITES;

pub fn run_examples() {
    println!("{:<16} {}", "NAME", "URL");
    for site in EXAMPLE_SITES {
        println!("{:<16} {}", site.name, site.url);
    }
}
