fn main() {
    polar_sim::app::run();
}
