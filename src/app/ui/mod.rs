mod fps;
mod panels;
mod sections;
