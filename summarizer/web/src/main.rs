fn main() {
	web::launch();
}
