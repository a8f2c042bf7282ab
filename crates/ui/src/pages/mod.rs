//! # Pages
//!
//! One component per [`Route`](procurex_controller::Route).

pub mod growth;
pub mod home;
pub mod notes;
pub mod product_detail;
pub mod products;
pub mod sign_in;
pub mod sign_up;
pub mod vendor_detail;

pub use growth::GrowthPage;
pub use home::HomePage;
pub use notes::NotesPage;
pub use product_detail::ProductDetailPage;
pub use products::ProductsPage;
pub use sign_in::SignInPage;
pub use sign_up::SignUpPage;
pub use vendor_detail::VendorDetailPage;
