pub mod repositories {
    pub mod postgres;
}
