fn main() {
    auction_market_web::run();
}
