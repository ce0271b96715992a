pub type Rgb = rgb::RGB8;
