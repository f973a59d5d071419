//! The single page served at `/`.
//!
//! The shell is built client-side from `/api/layout`, so the HTML stays a
//! dumb container and the layout module remains the one source of truth for
//! element ids and headings.

pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Operational Resilience Risk Analysis - Banking Solutions</title>
    <script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
    <style>
        body { font-family: Arial, sans-serif; margin: 40px; }
        h1 { font-size: 1.6em; }
        label { font-weight: bold; margin-right: 10px; }
        select { font-size: 1em; padding: 4px; min-width: 260px; }
        .graph { width: 100%; max-width: 900px; height: 420px; margin: 10px 0; }
        .text { font-size: 1.2em; margin: 10px 0; }
    </style>
</head>
<body>
    <div id="app"></div>
    <script>
        async function fetchJson(url) {
            const resp = await fetch(url);
            const body = await resp.json();
            if (!resp.ok) {
                throw new Error(body.data || resp.statusText);
            }
            return body;
        }

        function buildShell(layout) {
            const app = document.getElementById("app");

            const title = document.createElement("h1");
            title.textContent = layout.title;
            app.appendChild(title);

            const label = document.createElement("label");
            label.htmlFor = layout.dropdown.id;
            label.textContent = layout.dropdown.label;
            app.appendChild(label);

            const select = document.createElement("select");
            select.id = layout.dropdown.id;
            for (const option of layout.dropdown.options) {
                const el = document.createElement("option");
                el.value = option;
                el.textContent = option;
                select.appendChild(el);
            }
            select.value = layout.dropdown.value;
            app.appendChild(select);

            for (const region of layout.outputs) {
                const heading = document.createElement("h2");
                heading.textContent = region.heading;
                app.appendChild(heading);

                const target = document.createElement("div");
                target.id = region.id;
                target.className = region.kind;
                app.appendChild(target);
            }

            return select;
        }

        async function updateOutputs(layout, solution) {
            try {
                const envelope = await fetchJson(
                    "/api/solutions/" + encodeURIComponent(solution)
                );
                const view = envelope.data;
                for (const region of layout.outputs) {
                    const target = document.getElementById(region.id);
                    if (region.kind === "text") {
                        target.textContent = view[region.source];
                    } else {
                        const figure = view[region.source];
                        Plotly.react(target, figure.data, figure.layout, {
                            responsive: true
                        });
                    }
                }
            } catch (err) {
                const textRegion = layout.outputs.find(function (r) {
                    return r.kind === "text";
                });
                if (textRegion) {
                    const target = document.getElementById(textRegion.id);
                    target.textContent = err.message;
                }
            }
        }

        async function main() {
            const layout = await fetchJson("/api/layout");
            document.title = layout.title;
            const select = buildShell(layout);
            select.addEventListener("change", function () {
                updateOutputs(layout, select.value);
            });
            await updateOutputs(layout, layout.dropdown.value);
        }

        main();
    </script>
</body>
</html>
"##;
