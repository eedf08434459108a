/// Injected before `</body>` of every compiled page.
///
/// Same-page `#anchor` links scroll the named element into view. Links to
/// other `.html` documents are reported to the host as
/// `{command: 'goto', uri}`. Incoming `{command: 'goto', anchor}` messages
/// scroll to the anchor.
pub const NAVIGATION_SCRIPT: &str = r##"
<script>
    const luadocHost = typeof acquireVsCodeApi === 'function'
        ? acquireVsCodeApi()
        : { postMessage: (message) => window.parent.postMessage(message, '*') };
    function luadocGotoAnchor(anchor) {
        for (const element of document.getElementsByName(anchor)) {
            element.scrollIntoView();
            break;
        }
    }
    for (const link of document.querySelectorAll('a[href^="#"]')) {
        link.addEventListener('click', () => {
            luadocGotoAnchor(link.getAttribute('href').substring(1));
        });
    }
    for (const link of document.querySelectorAll('a[href*=".html"]')) {
        link.addEventListener('click', () => {
            luadocHost.postMessage({
                command: 'goto',
                uri: link.getAttribute('href'),
            });
        });
    }
    window.addEventListener('message', (event) => {
        const message = event.data;
        switch (message.command) {
            case 'goto':
                luadocGotoAnchor(message.anchor);
                break;
        }
    });
</script>
"##;
