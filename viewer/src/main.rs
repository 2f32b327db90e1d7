use crate::management::viewer::Viewer;

pub mod management;
pub mod utils;
pub mod web;

#[actix_web::main]
async fn main() {
    Viewer::run().await;
    Viewer::terminate().await;
}
