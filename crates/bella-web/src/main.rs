fn main() {
    bella_web::run();
}
