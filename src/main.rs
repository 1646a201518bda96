fn main() {
    #[cfg(feature = "csr")]
    blogdesk::mount();
}
