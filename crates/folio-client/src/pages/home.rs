//! The single portfolio page.

use yew::prelude::*;

use crate::components::{
    AnimatedBackground, Contact, CustomCursor, Education, Experience, Footer,
    GithubContributions, Hero, Navbar, Projects, Skills,
};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <>
            <AnimatedBackground />
            <CustomCursor />
            <main class="page home-page">
                <Navbar />
                <Hero />
                <Education />
                <Experience />
                <Projects />
                <Skills />
                <GithubContributions />
                <Contact />
                <Footer />
            </main>
        </>
    }
}
