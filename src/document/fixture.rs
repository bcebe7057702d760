//! A miniature monolithic source document shared by tests.
//!
//! Shape matches the real site: head, nav, main with one section per page,
//! a modals block with three page modals and the shared auth modal, the
//! knowledge section sitting outside the main container, and the trailing
//! script includes.

pub const MONOLITH: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>ccooffee</title>
    <link rel="stylesheet" href="style.css">
</head>
<body>
    <nav id="main-nav" class="glass-nav">
        <button class="nav-btn" onclick="window.location.href='index.html'"><span class="material-symbols-rounded">home</span></button>
    </nav>
    <div id="particle-bg"></div>

    <main id="app">
        <!-- HOME -->
        <section id="home" class="page">
            <h1>ccooffee</h1>
        </section>

        <!-- BREW GUIDE -->
        <section id="brew" class="page">
            <div class="brew-grid"><img src="assets/v60.png"></div>
        </section>

        <!-- DRINKS -->
        <section id="drinks" class="page">
            <div class="drink-list"></div>
        </section>

        <!-- DIAL IN -->
        <section id="dialin" class="page">
            <div class="dial-form"></div>
        </section>

        <!-- SHOPS -->
        <section id="shops" class="page">
            <div class="shop-map"></div>
        </section>
    </main>

    <!-- MODALS -->
    <!-- Brew Modal -->
    <div id="brew-modal" class="modal hidden">
        <div class="modal-content">
            <p>pour over</p>
        </div>
    </div>

    <!-- Drink Modal -->
    <div id="drink-modal" class="modal hidden">
        <div class="modal-content"></div>
    </div>

    <!-- Shop Modal -->
    <div id="shop-modal" class="modal hidden">
        <div class="modal-content"></div>
    </div>

    <!-- Auth Modal -->
    <div id="auth-modal" class="modal hidden">
        <div class="modal-content"></div>
    </div>
    <div id="toast"></div>

    <!-- KNOWLEDGE BASE -->
    <section id="knowledge" class="page">
        <article>espresso basics</article>
    </section>

    <script type="module" src="js/firebase-config.js"></script>
    <script type="module" src="js/app.js"></script>
</body>
</html>
"#;
